use leptos::*;

use feedback_boundary::ContactRequest;
use feedback_frontend_api::FeedbackApi;

use super::error_message;

#[component]
pub fn ContactForm(api: FeedbackApi) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);

    let send_message = Action::new(move |request: &ContactRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            match api.send_contact_message(&request).await {
                Ok(confirmation) => {
                    status.set(Some(confirmation.message));
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    log::error!("Unable to send contact message: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send_message.dispatch(ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        });
    };

    let pending = send_message.pending();

    view! {
      <form class="feedback-contact" on:submit=on_submit>
        <input
          type="text"
          required
          placeholder="Your name"
          prop:value=move || name.get()
          on:input=move |ev| name.set(event_target_value(&ev))
        />
        <input
          type="email"
          required
          placeholder="Your e-mail address"
          prop:value=move || email.get()
          on:input=move |ev| email.set(event_target_value(&ev))
        />
        <textarea
          required
          placeholder="Your message"
          rows="5"
          prop:value=move || message.get()
          on:input=move |ev| message.set(event_target_value(&ev))
        />
        <button type="submit" prop:disabled=move || pending.get()>
          {move || if pending.get() { "Sending..." } else { "Send message" }}
        </button>
        {move || status.get().map(|msg| view! { <p class="status">{ msg }</p> })}
      </form>
    }
}
