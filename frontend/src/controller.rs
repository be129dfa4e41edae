use crate::{
    api::Backend,
    error::{Error, Result},
    types::{Email, EmailId, EmailUpdate},
};

/// an email fetched for display, with the outcome of marking it read
#[derive(Debug)]
pub struct OpenedEmail {
    pub email: Email,
    pub mark_read_error: Option<Error>,
}

/// fetch an email and mark it read when needed, the returned copy reflects
/// whether the update went through
pub(crate) async fn open_email<B: Backend>(backend: &B, id: EmailId) -> Result<OpenedEmail> {
    let mut email = backend.get_email(id).await?;
    let mut mark_read_error = None;

    if !email.read {
        match backend.update_email(id, &EmailUpdate::mark_read()).await {
            Ok(()) => email.read = true,
            Err(e) => mark_read_error = Some(e),
        }
    }

    Ok(OpenedEmail {
        email,
        mark_read_error,
    })
}

/// flip the archived flag, returns the new value
pub(crate) async fn toggle_archive<B: Backend>(backend: &B, email: &Email) -> Result<bool> {
    let update = email.archive_toggle();
    backend.update_email(email.id, &update).await?;

    Ok(update.archived.unwrap_or(email.archived))
}
