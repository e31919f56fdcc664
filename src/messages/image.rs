//! Image messages - communication between App layer and the image loader

/// Commands sent from App layer to the image loader
#[derive(Debug, Clone)]
pub enum ImageCommand {
    /// Fetch an image for display at `size` dp
    Fetch {
        id: u64,
        url: String,
        size: u16,
    },
    /// Abandon an in-flight fetch
    Cancel(u64),
    /// Shutdown the loader
    Shutdown,
}

/// Events sent from the image loader back to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum ImageEvent {
    Progress {
        id: u64,
        received: usize,
    },
    Loaded {
        id: u64,
        bytes: usize,
        content_type: Option<String>,
        time_ms: u64,
    },
    Failed {
        id: u64,
        message: String,
    },
    Cancelled {
        id: u64,
    },
}

impl ImageEvent {
    pub fn id(&self) -> u64 {
        match self {
            ImageEvent::Progress { id, .. } => *id,
            ImageEvent::Loaded { id, .. } => *id,
            ImageEvent::Failed { id, .. } => *id,
            ImageEvent::Cancelled { id } => *id,
        }
    }

    /// No more events follow for this id
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageEvent::Progress { .. })
    }
}
