// Dialog sizing and the dismissal decisions shared by every channel.

use crate::input::HostKey;

/// Fixed dialog widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl DialogSize {
    pub const ALL: [DialogSize; 4] = [DialogSize::Sm, DialogSize::Md, DialogSize::Lg, DialogSize::Xl];

    pub fn width_class(self) -> &'static str {
        match self {
            DialogSize::Sm => "w-[22.5rem]",
            DialogSize::Md => "w-[31rem]",
            DialogSize::Lg => "w-[35rem]",
            DialogSize::Xl => "w-[37.5rem]",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DialogSize::Sm => "sm",
            DialogSize::Md => "md",
            DialogSize::Lg => "lg",
            DialogSize::Xl => "xl",
        }
    }
}

/// Which ways of closing a dialog are available.
///
/// `closeable` is the master switch: when it is false nothing closes the
/// dialog, including the close button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissPolicy {
    pub closeable: bool,
    pub hide_close_button: bool,
    pub disable_close_on_escape: bool,
    pub disable_close_on_click_outside: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            closeable: true,
            hide_close_button: false,
            disable_close_on_escape: false,
            disable_close_on_click_outside: false,
        }
    }
}

impl DismissPolicy {
    pub fn shows_close_button(&self) -> bool {
        self.closeable && !self.hide_close_button
    }

    pub fn dismisses_on_pointer_down(&self, inside_body: bool) -> bool {
        self.closeable && !self.disable_close_on_click_outside && !inside_body
    }

    pub fn dismisses_on_key(&self, key: &HostKey) -> bool {
        self.closeable && !self.disable_close_on_escape && key.is_escape()
    }
}
