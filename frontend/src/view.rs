use crate::types::Email;
use web_sys::MouseEvent;
use yew::{function_component, html, Callback, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ViewEmailProps {
    pub email: Option<Email>,
    pub reply: Callback<MouseEvent>,
    pub toggle_archive: Callback<MouseEvent>,
    pub pending: bool,
}

#[function_component(ViewEmail)]
pub fn view(props: &ViewEmailProps) -> Html {
    let Some(email) = &props.email else {
        return html! {};
    };

    html! {
      <div class="view-inner">
        <table>
          <tbody>
            <tr>
              <th>{"From"}</th>
              <td><span class="email">{&email.sender}</span></td>
            </tr>
            <tr>
              <th>{"To"}</th>
              <td>
                {email.recipients.iter().map(|to| html! {
                  <span class="email">{to}</span>
                }).collect::<Html>()}
              </td>
            </tr>
            <tr>
              <th>{"Subject"}</th>
              <td>{&email.subject}</td>
            </tr>
            <tr>
              <th>{"Timestamp"}</th>
              <td>{&email.timestamp}</td>
            </tr>
          </tbody>
        </table>
        <div class="actions">
          <button id="reply" onclick={props.reply.clone()}>
            {"Reply"}
          </button>
          <button
            id="archive"
            onclick={props.toggle_archive.clone()}
            disabled={props.pending}
          >
            {email.archive_label()}
          </button>
        </div>
        <hr />
        <div class="body">
          <pre>{&email.body}</pre>
        </div>
      </div>
    }
}
