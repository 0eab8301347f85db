/// Dialogue state for flows that wait on the next free-text message.
#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingAmount,
    AwaitingSumInput,
}
