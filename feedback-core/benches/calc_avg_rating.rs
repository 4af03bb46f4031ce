use brunch::{Bench, Benches};
use feedback_core::rating::Rated;
use feedback_entities::{builders::*, rating::*};

fn main() {
    let mut benches = Benches::default();

    let ratings = create_ratings_of_page("index", 1000);

    benches.push(
        Bench::new("Calculate avg. of 1000 ratings of a page")
            .run(|| ratings[..].average_rating()),
    );
    benches.finish();
}

fn create_ratings_of_page(page_id: &str, n: usize) -> Vec<Rating> {
    (0..n)
        .map(|i| {
            Rating::build()
                .page_id(page_id)
                .value(1 + (i % 5) as i64)
                .finish()
        })
        .collect()
}
