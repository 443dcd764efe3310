/// One portfolio thumbnail as read from the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortfolioImage {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Next,
    Previous,
}

impl LightboxCommand {
    /// Keyboard shortcuts honoured while the lightbox is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxCommand::Close),
            "ArrowRight" => Some(LightboxCommand::Next),
            "ArrowLeft" => Some(LightboxCommand::Previous),
            _ => None,
        }
    }
}

/// Fixed, ordered image list plus the open/closed navigation state.
///
/// Indices wrap in both directions; navigation while closed does nothing.
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<PortfolioImage>,
    state: LightboxState,
}

impl Gallery {
    pub fn new(images: Vec<PortfolioImage>) -> Self {
        Self {
            images,
            state: LightboxState::Closed,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn current(&self) -> Option<&PortfolioImage> {
        match self.state {
            LightboxState::Open(index) => self.images.get(index),
            LightboxState::Closed => None,
        }
    }

    /// Opens at `index`; out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Option<&PortfolioImage> {
        if index >= self.images.len() {
            return None;
        }
        self.state = LightboxState::Open(index);
        self.images.get(index)
    }

    pub fn next(&mut self) -> Option<&PortfolioImage> {
        let LightboxState::Open(index) = self.state else {
            return None;
        };
        self.state = LightboxState::Open((index + 1) % self.images.len());
        self.current()
    }

    pub fn previous(&mut self) -> Option<&PortfolioImage> {
        let LightboxState::Open(index) = self.state else {
            return None;
        };
        let len = self.images.len();
        self.state = LightboxState::Open((index + len - 1) % len);
        self.current()
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn apply(&mut self, command: LightboxCommand) -> Option<&PortfolioImage> {
        match command {
            LightboxCommand::Close => {
                self.close();
                None
            }
            LightboxCommand::Next => self.next(),
            LightboxCommand::Previous => self.previous(),
        }
    }
}
