use std::rc::Rc;

use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api::{Backend, HttpBackend},
    compose::Compose,
    config::Config,
    controller::{self, OpenedEmail},
    error::Result,
    list::MailboxList,
    state::{AppState, Panel, PanelKind, RequestToken},
    types::{Draft, DraftField, Email, EmailId, Mailbox, SendReceipt},
    view::ViewEmail,
};

pub enum Msg {
    ShowMailbox(Mailbox),
    MailboxLoaded {
        token: RequestToken,
        mailbox: Mailbox,
        result: Result<Vec<Email>>,
    },
    ShowEmail(EmailId),
    EmailLoaded {
        token: RequestToken,
        result: Result<OpenedEmail>,
    },
    Compose,
    Reply,
    Edit(DraftField, String),
    Send,
    Sent {
        token: RequestToken,
        result: Result<SendReceipt>,
    },
    ToggleArchive,
    ArchiveToggled {
        token: RequestToken,
        id: EmailId,
        result: Result<bool>,
    },
}

pub struct App {
    config: Config,
    backend: Rc<HttpBackend>,
    state: AppState,
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

impl App {
    fn load_mailbox(&self, ctx: &Context<Self>, token: RequestToken, mailbox: Mailbox) {
        let link = ctx.link().clone();
        let backend = self.backend.clone();

        spawn_local(async move {
            let result = backend.list_mailbox(mailbox).await;
            link.send_message(Msg::MailboxLoaded {
                token,
                mailbox,
                result,
            });
        });
    }

    fn load_email(&self, ctx: &Context<Self>, token: RequestToken, id: EmailId) {
        let link = ctx.link().clone();
        let backend = self.backend.clone();

        spawn_local(async move {
            let result = controller::open_email(&*backend, id).await;
            link.send_message(Msg::EmailLoaded { token, result });
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Config::load();
        let backend = Rc::new(HttpBackend::new(config.clone()));

        ctx.link().send_message(Msg::ShowMailbox(Mailbox::Inbox));

        Self {
            config,
            backend,
            state: AppState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowMailbox(mailbox) => {
                let token = self.state.show_mailbox(mailbox);
                self.load_mailbox(ctx, token, mailbox);
            }
            Msg::MailboxLoaded {
                token,
                mailbox,
                result,
            } => {
                if let Err(e) = &result {
                    error!(format!("Error loading {} mailbox: {e}", mailbox.path()));
                }

                return self.state.mailbox_loaded(token, result.ok());
            }
            Msg::ShowEmail(id) => {
                let token = self.state.show_email(id);
                self.load_email(ctx, token, id);
            }
            Msg::EmailLoaded { token, result } => match result {
                Ok(opened) => {
                    if let Some(e) = opened.mark_read_error {
                        error!(format!("Error marking email {} as read: {e}", opened.email.id));
                    }

                    return self.state.email_loaded(token, opened.email);
                }
                Err(e) => {
                    error!(format!("Error loading email: {e}"));

                    return self.state.email_failed(token);
                }
            },
            Msg::Compose => {
                self.state.show_compose(None);
            }
            Msg::Reply => {
                let Some(email) = self.state.email() else {
                    return false;
                };
                let draft = Draft::reply(email);
                self.state.show_compose(Some(draft));
            }
            Msg::Edit(field, value) => {
                self.state.edit_draft(field, value);
            }
            Msg::Send => {
                let Some((token, draft)) = self.state.begin_send() else {
                    return false;
                };
                let link = ctx.link().clone();
                let backend = self.backend.clone();

                spawn_local(async move {
                    let result = backend.send_email(&draft.to_outgoing()).await;
                    link.send_message(Msg::Sent { token, result });
                });
            }
            Msg::Sent { token, result } => {
                match result {
                    Ok(SendReceipt { message, error: failure }) => {
                        if let Some(message) = message {
                            log!(message);
                        }
                        if let Some(e) = failure {
                            error!(format!("Error sending email: {e}"));
                        }
                    }
                    Err(e) => error!(format!("Error sending email: {e}")),
                }

                match self.state.email_sent(token) {
                    Some(token) => self.load_mailbox(ctx, token, Mailbox::Sent),
                    None => return false,
                }
            }
            Msg::ToggleArchive => {
                let Some((token, email)) = self.state.begin_archive_toggle() else {
                    return false;
                };
                let link = ctx.link().clone();
                let backend = self.backend.clone();

                spawn_local(async move {
                    let result = controller::toggle_archive(&*backend, &email).await;
                    link.send_message(Msg::ArchiveToggled {
                        token,
                        id: email.id,
                        result,
                    });
                });
            }
            Msg::ArchiveToggled { token, id, result } => {
                if let Err(e) = &result {
                    error!(format!("Error updating archive flag of email {id}: {e}"));
                }

                if let Some(token) = self.state.archive_toggled(token, id, result.ok()) {
                    self.load_mailbox(ctx, token, Mailbox::Inbox);
                }
            }
        };

        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let title = self.config.document_title(self.state.unread_count());
        gloo_utils::document().set_title(&title);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;

        let nav = Mailbox::ALL
            .into_iter()
            .map(|mailbox| {
                html! {
                  <button
                    id={mailbox.button_id()}
                    class="btn btn-sm btn-outline-primary"
                    onclick={link.callback(move |_| Msg::ShowMailbox(mailbox))}
                  >
                    {mailbox.title()}
                  </button>
                }
            })
            .collect::<Html>();

        let mailbox = match state.panel() {
            Panel::MailboxList(mailbox) => mailbox,
            _ => Mailbox::Inbox,
        };

        html! {
          <>
            <header>
              <h1>{&self.config.title}</h1>
              <nav>
                {nav}
                <button
                  id="compose"
                  class="btn btn-sm btn-outline-primary"
                  onclick={link.callback(|_| Msg::Compose)}
                >
                  {"Compose"}
                </button>
              </nav>
            </header>
            <div id="emails-view" style={display(state.is_visible(PanelKind::MailboxList))}>
              <MailboxList
                mailbox={mailbox}
                emails={state.emails().to_vec()}
                loading={state.loading()}
                failed={state.failed()}
                select={link.callback(Msg::ShowEmail)}
              />
            </div>
            <div id="email-view" style={display(state.is_visible(PanelKind::EmailDetail))}>
              <ViewEmail
                email={state.email().cloned()}
                reply={link.callback(|_| Msg::Reply)}
                toggle_archive={link.callback(|_| Msg::ToggleArchive)}
                pending={state.action_pending()}
              />
            </div>
            <div id="compose-view" style={display(state.is_visible(PanelKind::Compose))}>
              <Compose
                draft={state.draft().clone()}
                edit={link.callback(|(field, value): (DraftField, String)| Msg::Edit(field, value))}
                send={link.callback(|_: ()| Msg::Send)}
                sending={state.action_pending()}
              />
            </div>
          </>
        }
    }
}
