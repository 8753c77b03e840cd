// Presentation classes. The open/closed look has no effect on dismissal.

use super::policy::DialogSize;

const BACKDROP: &str = "fixed inset-0 flex items-center justify-center bg-black/25";
const BODY: &str = "flex flex-col p-8 gap-4 bg-neutrals-light-100 rounded-lg max-w-[80vw] max-h-[95vh] overflow-auto";
const TRANSITION: &str = "transition-all duration-200 ease-in-out";
const CLOSED: &str = "opacity-0 shadow-none pointer-events-none scale-95 z-50";
const OPEN: &str = "opacity-100 shadow-lg pointer-events-auto scale-100 z-50";

pub const HEADER: &str = "flex flex-row w-full justify-between items-center";
pub const HEADER_TITLE: &str = "flex flex-row gap-2 text-2xl font-semibold text-neutrals-dark-500";
pub const HEADER_TITLE_ICON: &str = "flex items-center justify-center pb-1";
pub const CLOSE_BUTTON: &str =
    "flex items-center justify-center w-8 h-8 text-neutrals-dark-200 hover:text-primary-main transition-colors";
pub const FORM: &str = "flex flex-col gap-8";

fn visibility(is_open: bool) -> &'static str {
    if is_open {
        OPEN
    } else {
        CLOSED
    }
}

pub fn backdrop_class(is_open: bool) -> String {
    format!("{BACKDROP} {TRANSITION} {}", visibility(is_open))
}

pub fn body_class(size: DialogSize, is_open: bool) -> String {
    format!(
        "{BODY} {} {TRANSITION} {}",
        size.width_class(),
        visibility(is_open)
    )
}
