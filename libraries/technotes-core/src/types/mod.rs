mod actor;
mod ids;
mod note;
mod role;
pub mod timestamp;
mod user;

pub use actor::Actor;
pub use ids::{NoteId, UserId};
pub use note::Note;
pub use role::Role;
pub use user::User;
