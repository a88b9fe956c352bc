pub const BG_COLOR: [u8; 3] = [48, 48, 60];  // main bg
pub const BG2_COLOR: [u8; 3] = [32, 32, 32];  // bg for radio buttons and such
pub const FG_COLOR: [u8; 3] = [200, 200, 200];  // main fg
pub const SEL_COLOR: [u8; 3] = [128, 16, 16];  // selection

pub const ITEM_HEIGHT: i32 = 24;
pub const WINDOW_SIZE: (i32, i32) = (650, 400);

pub fn apply() {
    use fltk::app;
    app::set_background_color(BG_COLOR[0], BG_COLOR[1], BG_COLOR[2]);
    app::set_foreground_color(FG_COLOR[0], FG_COLOR[1], FG_COLOR[2]);
    app::set_background2_color(BG2_COLOR[0], BG2_COLOR[1], BG2_COLOR[2]);
    app::set_selection_color(SEL_COLOR[0], SEL_COLOR[1], SEL_COLOR[2]);
    app::set_visible_focus(false);
}
