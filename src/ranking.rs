use crate::entities::movie;

/// Assigns 1-based ranks to movies already ordered ascending by rating
/// (unrated first). The lowest-rated movie gets 1, the highest gets `len`.
/// Ties keep the incoming order.
pub fn assign_rankings(movies: &mut [movie::Model]) {
    for (index, movie) in movies.iter_mut().enumerate() {
        movie.ranking = Some(index as i32 + 1);
    }
}
