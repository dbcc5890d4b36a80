use std::io::Write;

use crossbeam_channel::Sender;

use crate::ArmMessage;

#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("result receiver disconnected")]
    Disconnected,
}

/// Receives one [`ArmMessage`] per camera-B trigger.
///
/// Errors are logged by the pipeline and never stop it.
pub trait ResultSink {
    fn publish(&mut self, message: &ArmMessage) -> Result<(), SinkError>;
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn publish(&mut self, message: &ArmMessage) -> Result<(), SinkError> {
        (**self).publish(message)
    }
}

/// Writes each message as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn publish(&mut self, message: &ArmMessage) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Forwards messages over a crossbeam channel.
pub struct ChannelSink {
    tx: Sender<ArmMessage>,
}

impl ChannelSink {
    pub fn new(tx: Sender<ArmMessage>) -> Self {
        Self { tx }
    }
}

impl ResultSink for ChannelSink {
    fn publish(&mut self, message: &ArmMessage) -> Result<(), SinkError> {
        self.tx
            .send(message.clone())
            .map_err(|_| SinkError::Disconnected)
    }
}

/// Keeps every message in memory.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    pub messages: Vec<ArmMessage>,
}

impl ResultSink for VecSink {
    fn publish(&mut self, message: &ArmMessage) -> Result<(), SinkError> {
        self.messages.push(message.clone());
        Ok(())
    }
}
