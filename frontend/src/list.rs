use crate::types::{Email, EmailId, Mailbox};
use web_sys::KeyboardEvent;
use yew::{function_component, html, Callback, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MailboxListProps {
    pub mailbox: Mailbox,
    pub emails: Vec<Email>,
    pub loading: bool,
    pub failed: bool,
    pub select: Callback<EmailId>,
}

fn opens_row(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// background treatment of a row
pub fn row_class(email: &Email) -> &'static str {
    if email.read {
        "mail-row read"
    } else {
        "mail-row unread"
    }
}

#[function_component(MailboxList)]
pub fn list(props: &MailboxListProps) -> Html {
    let rows = props
        .emails
        .iter()
        .map(|email| {
            let id = email.id;
            let onclick = {
                let select = props.select.clone();
                Callback::from(move |_| select.emit(id))
            };
            let onkeydown = {
                let select = props.select.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if opens_row(&e.key()) {
                        select.emit(id)
                    }
                })
            };

            html! {
              <li
                key={email.id}
                tabIndex="0"
                onclick={onclick}
                onkeydown={onkeydown}
                class={row_class(email)}
              >
                <span class="subject">{&email.subject}</span>
                <span class="sender">{&email.sender}</span>
                <span class="timestamp">{&email.timestamp}</span>
              </li>
            }
        })
        .collect::<Html>();

    html! {
      <>
        <h3>{props.mailbox.title()}</h3>
        if props.failed {
          <div class="empty" />
        } else if props.emails.is_empty() {
          <div class="empty">
            if props.loading {
              <div class="bouncing-loader">
                <div></div>
                <div></div>
                <div></div>
              </div>
            } else {
              {"No messages 📭"}
            }
          </div>
        } else {
          <ul class="mail-list">{rows}</ul>
        }
      </>
    }
}
