use leptos::*;

use feedback_boundary::{Comment, NewComment};
use feedback_frontend_api::FeedbackApi;

use super::error_message;
use crate::render::comment_card;

#[component]
pub fn CommentsWidget(api: FeedbackApi, page_id: String) -> impl IntoView {
    // -- signals -- //

    let comments = RwSignal::new(None::<Result<Vec<Comment>, String>>);
    let name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);

    // -- actions -- //

    let fetch_comments = {
        let api = api.clone();
        let page_id = page_id.clone();
        Action::new(move |(): &()| {
            let api = api.clone();
            let page_id = page_id.clone();
            async move {
                let result = api.comments(Some(&page_id)).await.map_err(|err| {
                    log::warn!("Unable to fetch comments: {err}");
                    "Error loading comments.".to_owned()
                });
                comments.set(Some(result));
            }
        })
    };

    let submit_comment = Action::new(move |new_comment: &NewComment| {
        let api = api.clone();
        let new_comment = new_comment.clone();
        async move {
            match api.create_comment(&new_comment).await {
                Ok(comment) => {
                    log::debug!("Created comment {}", comment.id);
                    status.set(Some("Comment submitted successfully!".to_owned()));
                    name.set(String::new());
                    message.set(String::new());
                    fetch_comments.dispatch(());
                }
                Err(err) => {
                    log::error!("Unable to submit comment: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let author = name.get_untracked().trim().to_owned();
        let text = message.get_untracked().trim().to_owned();
        if author.is_empty() || text.is_empty() {
            status.set(Some("Please fill in all fields.".to_owned()));
            return;
        }
        submit_comment.dispatch(NewComment {
            name: Some(author),
            message: Some(text),
            page_id: Some(page_id.clone()),
        });
    };

    fetch_comments.dispatch(());

    let pending = submit_comment.pending();

    view! {
      <div class="feedback-comments">
        <form on:submit=on_submit>
          <input
            type="text"
            placeholder="Your name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
          />
          <textarea
            placeholder="Your comment"
            rows="4"
            prop:value=move || message.get()
            on:input=move |ev| message.set(event_target_value(&ev))
          />
          <button type="submit" prop:disabled=move || pending.get()>"Post comment"</button>
        </form>
        {move || status.get().map(|msg| view! { <p class="status">{ msg }</p> })}
        <div class="comments">
          {move || match comments.get() {
              None => view! { <p>"Loading comments..."</p> }.into_view(),
              Some(Err(msg)) => view! { <p class="error">{ msg }</p> }.into_view(),
              Some(Ok(comments)) if comments.is_empty() => {
                  view! { <p>"No comments yet."</p> }.into_view()
              }
              Some(Ok(comments)) => comments.into_iter().map(comment_card).collect_view(),
          }}
        </div>
      </div>
    }
}
