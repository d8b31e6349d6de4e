mod template;
mod vault;

pub use template::NoteTemplate;
pub use vault::NoteVault;
