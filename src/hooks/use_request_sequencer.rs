use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::stores::RequestSequencer;

pub type SequencerHandle = Rc<RefCell<RequestSequencer>>;

/// Sequencer that lives as long as the component and closes on unmount.
#[hook]
pub fn use_request_sequencer() -> SequencerHandle {
    let sequencer = use_mut_ref(RequestSequencer::default);
    {
        let sequencer = sequencer.clone();
        use_effect_with((), move |_| move || sequencer.borrow_mut().close());
    }
    sequencer
}
