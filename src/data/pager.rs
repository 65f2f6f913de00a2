use super::filter::TripView;
use super::model::TripRecord;

/// Records shown per page of raw data.
pub const PAGE_SIZE: usize = 5;

/// Fixed-size pages over a filtered view, starting at record 0.
///
/// Each page holds [`PAGE_SIZE`] records except possibly the last, and the
/// pages concatenated in order reproduce the view exactly.
pub struct Pages<'v, 'a> {
    view: &'v TripView<'a>,
    offset: usize,
}

impl<'v, 'a> Pages<'v, 'a> {
    pub fn new(view: &'v TripView<'a>) -> Self {
        Self { view, offset: 0 }
    }

    /// Whether another page remains to be shown.
    pub fn has_more(&self) -> bool {
        self.offset < self.view.len()
    }
}

impl<'v, 'a> Iterator for Pages<'v, 'a> {
    type Item = Vec<&'a TripRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.view.len() {
            return None;
        }
        let end = (self.offset + PAGE_SIZE).min(self.view.len());
        let page = (self.offset..end).filter_map(|n| self.view.get(n)).collect();
        self.offset = end;
        Some(page)
    }
}
