/// What a `pagehide` means for the running background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// The page is entering the back-forward cache and may be restored with
    /// its heap intact. The browser already stops animation frames.
    Suspend,
    /// The page is going away for good.
    Unload,
}

impl PageHide {
    /// Classify from `PageTransitionEvent.persisted`.
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Suspend
        } else {
            PageHide::Unload
        }
    }

    pub fn disposes(self) -> bool {
        self == PageHide::Unload
    }
}
