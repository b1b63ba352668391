mod editor_state;
mod member_picker;
