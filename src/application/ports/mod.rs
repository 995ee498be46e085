mod mailer;
mod media_store;
mod scribe_client;

pub use mailer::{HtmlEmail, Mailer, MailerError};
pub use media_store::{MediaStore, MediaStoreError};
pub use scribe_client::{
    ChannelDefinition, ParticipantRole, ScribeClient, ScribeClientError, ScribeJob,
    StartJobRequest,
};
