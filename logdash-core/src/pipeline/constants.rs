/// Lines handed from the reader thread to the consumer per message.
pub const BATCH_SIZE: usize = 1024;
/// Batches in flight before the reader blocks.
pub const CHANNEL_CAPACITY: usize = 16;
pub const REJECT_EXCERPT_CHARS: usize = 120;
pub const PROGRESS_EVERY: u64 = 100_000;
