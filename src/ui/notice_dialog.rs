use fltk::{
    app,
    button::Button,
    frame::Frame,
    group::Flex,
    prelude::{GroupExt, WidgetBase, WidgetExt, WindowExt},
    window::Window,
};

use super::theme::ITEM_HEIGHT;

const DIALOG_SIZE: (i32, i32) = (400, 100);

///
/// small modal message window with a single button.
/// does not block - wizard keeps running while it's shown
///
pub struct NoticeDialog {}

impl NoticeDialog {
    pub fn show(x: i32, y: i32, title: &str, text: &str) {
        let mut win = Window::default()
            .with_size(DIALOG_SIZE.0, DIALOG_SIZE.1)
            .with_label(title)
            .with_pos(x, y);
        let mut group = Flex::default_fill().column();
        Frame::default().with_label(text);
        let mut line = Flex::default().row();
        Frame::default();
        let mut btn = Button::default().with_label("Okay");
        btn.set_callback({
            let mut win = win.clone();
            move |_| {
                win.hide();
            }
        });
        line.fixed(&btn, 120);
        line.end();

        group.fixed(&line, ITEM_HEIGHT);
        group.end();
        win.end();

        win.make_modal(true);
        win.show();
    }

    pub fn show_in_center(title: &str, text: &str) {
        let (screen_w, screen_h) = app::screen_size();
        Self::show(
            (screen_w as i32 - DIALOG_SIZE.0) / 2,
            (screen_h as i32 - DIALOG_SIZE.1) / 2,
            title,
            text,
        );
    }
}
