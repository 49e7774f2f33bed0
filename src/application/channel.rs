//! Output channel selection and delivery

use std::io::Write;

use crate::domain::AnnouncementMessage;

use super::announce::AnnounceError;
use super::ports::Notifier;

/// Where the announcement goes, chosen once per run
pub enum OutputChannel<N, W> {
    /// Desktop notification through a [`Notifier`]
    Notify(N),
    /// Plain text on a writer (stdout in production)
    Stdout(W),
}

impl<N, W> OutputChannel<N, W>
where
    N: Notifier,
    W: Write,
{
    /// Deliver the announcement through this channel.
    ///
    /// The stdout variant writes the two lines followed by a newline and
    /// flushes. The notify variant sends exactly one notification.
    pub async fn deliver(&mut self, message: &AnnouncementMessage) -> Result<(), AnnounceError> {
        match self {
            Self::Notify(notifier) => {
                notifier.notify(message.title(), message.body()).await?;
            }
            Self::Stdout(writer) => {
                writeln!(writer, "{}", message)?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Short name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Notify(_) => "notification",
            Self::Stdout(_) => "stdout",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::application::ports::NotificationError;
    use crate::domain::{Genre, HallowedObject};

    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
            self.calls
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct MissingNotifier;

    #[async_trait]
    impl Notifier for MissingNotifier {
        async fn notify(&self, _title: &str, _body: &str) -> Result<(), NotificationError> {
            Err(NotificationError::ToolMissing {
                tool: "notify-send".to_string(),
            })
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn message() -> AnnouncementMessage {
        let object = HallowedObject::new("symptôme", "symptômes", Genre::Male);
        AnnouncementMessage::compose(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(), &object)
    }

    #[tokio::test]
    async fn stdout_writes_message_and_newline() {
        let mut channel: OutputChannel<RecordingNotifier, Vec<u8>> =
            OutputChannel::Stdout(Vec::new());

        channel.deliver(&message()).await.unwrap();

        let OutputChannel::Stdout(buffer) = channel else {
            panic!("channel changed variant");
        };
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Chalut ! Aujourd'hui, Mitanche 2, c'est la Saint-symptôme.\n\
             Bonne fête à tous les symptômes 🎆\n"
        );
    }

    #[tokio::test]
    async fn notify_sends_one_notification() {
        let mut channel: OutputChannel<RecordingNotifier, Vec<u8>> =
            OutputChannel::Notify(RecordingNotifier::default());

        channel.deliver(&message()).await.unwrap();

        let OutputChannel::Notify(notifier) = channel else {
            panic!("channel changed variant");
        };
        let calls = notifier.calls.into_inner().unwrap();
        assert_eq!(
            calls,
            vec![(
                "Bonne fête à tous les symptômes 🎆".to_string(),
                "Chalut ! Aujourd'hui, Mitanche 2, c'est la Saint-symptôme.".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn missing_tool_is_reported() {
        let mut channel: OutputChannel<MissingNotifier, Vec<u8>> =
            OutputChannel::Notify(MissingNotifier);

        let err = channel.deliver(&message()).await.unwrap_err();
        assert!(matches!(
            err,
            AnnounceError::Notification(NotificationError::ToolMissing { .. })
        ));
    }

    #[tokio::test]
    async fn write_failure_is_io_error() {
        let mut channel: OutputChannel<RecordingNotifier, BrokenPipe> =
            OutputChannel::Stdout(BrokenPipe);

        let err = channel.deliver(&message()).await.unwrap_err();
        assert!(matches!(err, AnnounceError::Io(_)));
    }

    #[test]
    fn names() {
        let stdout: OutputChannel<RecordingNotifier, Vec<u8>> = OutputChannel::Stdout(Vec::new());
        let notify: OutputChannel<RecordingNotifier, Vec<u8>> =
            OutputChannel::Notify(RecordingNotifier::default());
        assert_eq!(stdout.name(), "stdout");
        assert_eq!(notify.name(), "notification");
    }
}
