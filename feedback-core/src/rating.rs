use feedback_entities::rating::*;

pub trait Rated {
    fn average_rating(&self) -> AverageRating;
}

impl Rated for [Rating] {
    fn average_rating(&self) -> AverageRating {
        self.iter()
            .fold(AvgRatingValueBuilder::default(), |mut acc, r| {
                acc += r.value;
                acc
            })
            .build()
    }
}
