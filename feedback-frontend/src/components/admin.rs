use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use feedback_boundary::{Comment, Rating};
use feedback_frontend_api::AdminApi;

use super::error_message;
use crate::render::{comment_card, rating_row};

const TOKEN_STORAGE_KEY: &str = "feedback.admin-token";

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn AdminPanel(api_url: String) -> impl IntoView {
    // -- signals -- //

    let stored_token: Option<String> = LocalStorage::get(TOKEN_STORAGE_KEY).ok();
    let token = RwSignal::new(stored_token.unwrap_or_default());
    let comments = RwSignal::new(Vec::<Comment>::new());
    let ratings = RwSignal::new(Vec::<Rating>::new());
    let status = RwSignal::new(None::<String>);

    let api = Signal::derive(move || {
        let token = token.get();
        AdminApi::new(api_url.clone(), Some(token))
    });

    // -- actions -- //

    let fetch_all = Action::new(move |(): &()| {
        let api = api.get_untracked();
        async move {
            match api.public().comments(None).await {
                Ok(list) => comments.set(list),
                Err(err) => {
                    log::warn!("Unable to fetch comments: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
            match api.public().ratings(None).await {
                Ok(list) => ratings.set(list),
                Err(err) => {
                    log::warn!("Unable to fetch ratings: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
        }
    });

    let reset_ratings = Action::new(move |(): &()| {
        let api = api.get_untracked();
        async move {
            match api.reset_ratings().await {
                Ok(confirmation) => {
                    status.set(Some(confirmation.message));
                    fetch_all.dispatch(());
                }
                Err(err) => {
                    log::error!("Unable to reset ratings: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        let token = token.get();
        let result = if token.trim().is_empty() {
            LocalStorage::delete(TOKEN_STORAGE_KEY);
            Ok(())
        } else {
            LocalStorage::set(TOKEN_STORAGE_KEY, token)
        };
        if let Err(err) = result {
            log::warn!("Unable to store admin token: {err}");
        }
    });

    // -- callbacks -- //

    let on_changed = Callback::new(move |msg: String| {
        status.set(Some(msg));
        fetch_all.dispatch(());
    });

    let on_reset = move |_| {
        if confirm("Do you really want to delete all ratings?") {
            reset_ratings.dispatch(());
        }
    };

    fetch_all.dispatch(());

    view! {
      <div class="feedback-admin">
        <label>
          "Admin token "
          <input
            type="password"
            prop:value=move || token.get()
            on:input=move |ev| token.set(event_target_value(&ev))
          />
        </label>
        <button on:click=move |_| fetch_all.dispatch(())>"Reload"</button>
        {move || status.get().map(|msg| view! { <p class="status">{ msg }</p> })}
        <h3>"Comments"</h3>
        <For
          each=move || comments.get()
          key=|comment| (comment.id.clone(), comment.reply.as_ref().map(|r| r.replied_at))
          children=move |comment| view! { <AdminComment comment=comment api=api on_changed=on_changed /> }
        />
        <h3>"Ratings"</h3>
        <button
          class="danger"
          prop:disabled=move || reset_ratings.pending().get()
          on:click=on_reset
        >
          "Reset all ratings"
        </button>
        <ul class="ratings">
          {move || ratings.get().into_iter().map(rating_row).collect_view()}
        </ul>
      </div>
    }
}

#[component]
fn AdminComment(
    comment: Comment,
    api: Signal<AdminApi>,
    on_changed: Callback<String>,
) -> impl IntoView {
    let reply = RwSignal::new(String::new());
    let id = comment.id.clone();

    let send_reply = Action::new(move |(id, message): &(String, String)| {
        let api = api.get_untracked();
        let id = id.clone();
        let message = message.clone();
        async move {
            match api.reply_to_comment(&id, &message).await {
                Ok(_) => on_changed.call("Reply saved.".to_owned()),
                Err(err) => {
                    log::error!("Unable to reply to comment {id}: {err}");
                    on_changed.call(error_message(&err));
                }
            }
        }
    });

    let delete = Action::new(move |id: &String| {
        let api = api.get_untracked();
        let id = id.clone();
        async move {
            match api.delete_comment(&id).await {
                Ok(confirmation) => on_changed.call(confirmation.message),
                Err(err) => {
                    log::error!("Unable to delete comment {id}: {err}");
                    on_changed.call(error_message(&err));
                }
            }
        }
    });

    let on_reply = {
        let id = id.clone();
        move |_| {
            let message = reply.get_untracked().trim().to_owned();
            if message.is_empty() {
                on_changed.call("Reply message is required".to_owned());
                return;
            }
            send_reply.dispatch((id.clone(), message));
        }
    };

    let on_delete = move |_| {
        if confirm("Do you really want to delete this comment?") {
            delete.dispatch(id.clone());
        }
    };

    view! {
      <div class="admin-comment">
        { comment_card(comment) }
        <textarea
          placeholder="Reply"
          rows="2"
          prop:value=move || reply.get()
          on:input=move |ev| reply.set(event_target_value(&ev))
        />
        <button on:click=on_reply>"Reply"</button>
        <button class="danger" on:click=on_delete>"Delete"</button>
      </div>
    }
}
