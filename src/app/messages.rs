/// Messages from background tasks to the main UI thread
#[derive(Debug)]
pub enum BackgroundMessage {
    /// The detective answered a question about a case
    AssistantReply { case_id: String, content: String },
    /// The task for a case died before it could answer
    TaskFailed { case_id: String, detail: String },
}
