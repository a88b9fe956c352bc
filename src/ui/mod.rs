mod fltk_container;
mod notice_dialog;
pub mod theme;

pub use fltk_container::{build_wizard_window, FltkCardContainer, FltkWizard};
pub use notice_dialog::NoticeDialog;
