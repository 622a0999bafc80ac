//! Root reducer: routes each message to the domain reducer that owns it.
//! The first reducer to consume the message wins; an unhandled message is a
//! deliberate no-op rather than an error.

use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    let handled = reducers::nodes::update(state, &msg, &mut commands)
        || reducers::edges::update(state, &msg, &mut commands)
        || reducers::canvas::update(state, &msg, &mut commands);

    if !handled {
        crate::console_warn!("Unhandled message: {:?}", msg);
    }

    commands
}
