use crate::types::{Draft, DraftField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComposeProps {
    pub draft: Draft,
    pub edit: Callback<(DraftField, String)>,
    pub send: Callback<()>,
    pub sending: bool,
}

fn input_handler(edit: &Callback<(DraftField, String)>, field: DraftField) -> Callback<InputEvent> {
    let edit = edit.clone();

    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        edit.emit((field, value));
    })
}

#[function_component(Compose)]
pub fn compose(props: &ComposeProps) -> Html {
    let onsubmit = {
        let send = props.send.clone();
        Callback::from(move |e: SubmitEvent| {
            // keep the browser from submitting the form itself
            e.prevent_default();
            send.emit(());
        })
    };

    let onbody = {
        let edit = props.edit.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            edit.emit((DraftField::Body, value));
        })
    };

    html! {
      <>
        <h3>{"New Email"}</h3>
        <form id="compose-form" onsubmit={onsubmit}>
          <div class="form-group">
            {"To: "}
            <input
              id="compose-recipients"
              class="form-control"
              value={props.draft.recipients.clone()}
              oninput={input_handler(&props.edit, DraftField::Recipients)}
            />
          </div>
          <div class="form-group">
            <input
              id="compose-subject"
              class="form-control"
              placeholder="Subject"
              value={props.draft.subject.clone()}
              oninput={input_handler(&props.edit, DraftField::Subject)}
            />
          </div>
          <textarea
            id="compose-body"
            class="form-control"
            placeholder="Body"
            value={props.draft.body.clone()}
            oninput={onbody}
          />
          <input
            type="submit"
            class="btn btn-primary"
            value="Send"
            disabled={props.sending}
          />
        </form>
      </>
    }
}
