use leptos::*;

use feedback_boundary::{AverageRating, NewRating};
use feedback_frontend_api::FeedbackApi;

use super::error_message;
use crate::render::average_badge;

#[component]
pub fn RatingWidget(api: FeedbackApi, page_id: String) -> impl IntoView {
    // -- signals -- //

    let selected = RwSignal::new(0_u8);
    let hovered = RwSignal::new(0_u8);
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let average = RwSignal::new(None::<AverageRating>);

    // -- actions -- //

    let fetch_average = {
        let api = api.clone();
        let page_id = page_id.clone();
        Action::new(move |(): &()| {
            let api = api.clone();
            let page_id = page_id.clone();
            async move {
                match api.average_rating(Some(&page_id)).await {
                    Ok(avg) => average.set(Some(avg)),
                    Err(err) => {
                        log::warn!("Unable to fetch average rating: {err}");
                        average.set(None);
                    }
                }
            }
        })
    };

    let submit_rating = Action::new(move |new_rating: &NewRating| {
        let api = api.clone();
        let new_rating = new_rating.clone();
        async move {
            match api.create_rating(&new_rating).await {
                Ok(rating) => {
                    log::debug!("Created rating {}", rating.id);
                    status.set(Some("Rating submitted successfully!".to_owned()));
                    selected.set(0);
                    name.set(String::new());
                    fetch_average.dispatch(());
                }
                Err(err) => {
                    log::error!("Unable to submit rating: {err}");
                    status.set(Some(error_message(&err)));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if selected.get_untracked() == 0 {
            status.set(Some("Please select a rating.".to_owned()));
            return;
        }
        let rater = name.get_untracked().trim().to_owned();
        if rater.is_empty() {
            status.set(Some("Please enter your name.".to_owned()));
            return;
        }
        submit_rating.dispatch(NewRating {
            name: Some(rater),
            rating: Some(f64::from(selected.get_untracked())),
            page_id: Some(page_id.clone()),
        });
    };

    // The hovered star takes precedence over the selection
    let shown = move || match hovered.get() {
        0 => selected.get(),
        n => n,
    };

    fetch_average.dispatch(());

    let pending = submit_rating.pending();

    view! {
      <div class="feedback-rating">
        <form on:submit=on_submit>
          <div class="stars" on:mouseleave=move |_| hovered.set(0)>
            {(1..=5_u8).map(|n| view! {
              <span
                class="star"
                class:active=move || n <= shown()
                title=format!("{n} stars")
                on:mouseenter=move |_| hovered.set(n)
                on:click=move |_| selected.set(n)
              >
                "★"
              </span>
            }).collect_view()}
          </div>
          <input
            type="text"
            placeholder="Your name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
            prop:disabled=move || pending.get()
          />
          <button type="submit" prop:disabled=move || pending.get()>"Submit rating"</button>
        </form>
        {move || status.get().map(|msg| view! { <p class="status">{ msg }</p> })}
        {move || average.get().map(average_badge)}
      </div>
    }
}
