pub mod entry_list;
pub mod help;
pub mod status_bar;
pub mod text_input;

pub use entry_list::EntryList;
pub use help::Help;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
