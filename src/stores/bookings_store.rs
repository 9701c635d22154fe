// ============================================================================
// BOOKINGS STORE - State of the booking list view
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{Booking, BookingId};

/// Which form (if any) the list is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Hidden,
    Create,
    Edit(BookingId),
}

impl FormMode {
    pub fn is_visible(&self) -> bool {
        !matches!(self, FormMode::Hidden)
    }

    pub fn booking_id(&self) -> Option<BookingId> {
        match self {
            FormMode::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingsStore {
    pub bookings: Vec<Booking>,
    pub loading: bool,
    /// Fetch failure, replaces the whole view
    pub error: Option<String>,
    /// Non-blocking message shown above the list
    pub notice: Option<String>,
    /// Bumped per notice so a repeated message restarts its timer
    pub notice_seq: u64,
    pub form: FormMode,
    /// Bumped on every reset; deletes from an older generation are ignored
    pub generation: u64,
}

impl Default for BookingsStore {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            loading: true,
            error: None,
            notice: None,
            notice_seq: 0,
            form: FormMode::Hidden,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingsAction {
    /// User (or API) changed, start over
    Reset,
    Loaded(Vec<Booking>),
    LoadFailed(String),
    Removed { booking_id: BookingId, generation: u64 },
    RemoveFailed { message: String, generation: u64 },
    DismissNotice,
    OpenNew,
    OpenEdit(BookingId),
    CloseForm,
}

/// What the list view renders, in order of precedence.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Failed(&'a str),
    Loading,
    Ready(&'a [Booking]),
}

impl BookingsStore {
    pub fn view(&self) -> ListView<'_> {
        if let Some(error) = &self.error {
            ListView::Failed(error)
        } else if self.loading {
            ListView::Loading
        } else {
            ListView::Ready(&self.bookings)
        }
    }

    pub fn apply(&mut self, action: BookingsAction) {
        match action {
            BookingsAction::Reset => {
                *self = BookingsStore {
                    generation: self.generation + 1,
                    ..BookingsStore::default()
                };
            }
            BookingsAction::Loaded(bookings) => {
                self.bookings = bookings;
                self.loading = false;
                self.error = None;
            }
            BookingsAction::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            BookingsAction::Removed { generation, .. }
            | BookingsAction::RemoveFailed { generation, .. }
                if generation != self.generation =>
            {
                log::debug!("⏭️ Ignoring delete result from generation {}", generation);
            }
            BookingsAction::Removed { booking_id, .. } => {
                self.bookings.retain(|booking| booking.id != booking_id);
                if self.form == FormMode::Edit(booking_id) {
                    self.form = FormMode::Hidden;
                }
            }
            BookingsAction::RemoveFailed { message, .. } => {
                self.notice = Some(message);
                self.notice_seq += 1;
            }
            BookingsAction::DismissNotice => self.notice = None,
            BookingsAction::OpenNew => self.form = FormMode::Create,
            BookingsAction::OpenEdit(id) => self.form = FormMode::Edit(id),
            BookingsAction::CloseForm => self.form = FormMode::Hidden,
        }
    }
}

impl Reducible for BookingsStore {
    type Action = BookingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
