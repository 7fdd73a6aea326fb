use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, context: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        match error {
            ParseError::Several(errors) => {
                eprintln!("Parse errors:");

                for error in errors {
                    eprintln!(" {error}");
                }
            }
            ParseError::Config(error) => eprintln!("{error}"),
            error => eprintln!("Parse error: {error}"),
        }
    }

    fn print_error_context(&self, context: String) {
        eprintln!("{context}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::cell::RefCell;
    use std::sync::mpsc;

    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<ParseError>>,
        error_context: RefCell<Option<String>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                message: RefCell::new(None),
                error: RefCell::new(None),
                error_context: RefCell::new(None),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            let mut output = self.message.borrow_mut();

            match output.as_mut() {
                Some(messages) => messages.push(message),
                None => {
                    output.replace(vec![message]);
                }
            }
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error);
        }

        fn print_error_context(&self, context: String) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<ParseError>, Option<String>) {
            let InMemoryInterface {
                message,
                error,
                error_context,
            } = self;

            (
                message.take().map(|messages| messages.join("\n")),
                error.take(),
                error_context.take(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let (error_context_tx, error_context_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
            error_context_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
            error_context_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<String>,
        error_tx: mpsc::Sender<ParseError>,
        error_context_tx: mpsc::Sender<String>,
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(message).unwrap();
        }

        fn print_error(&self, error: ParseError) {
            self.error_tx.send(error).unwrap();
        }

        fn print_error_context(&self, context: String) {
            self.error_context_tx.send(context).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<String>,
        error_rx: mpsc::Receiver<ParseError>,
        error_context_rx: mpsc::Receiver<String>,
    }

    impl ReceiverInterface {
        /// Drain everything sent so far.
        /// The sender may still be alive (ex: held by a parser that is used again).
        pub(crate) fn consume(&self) -> (Option<String>, Option<ParseError>, Option<String>) {
            let messages: Vec<String> = self.message_rx.try_iter().collect();
            let message = if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            };

            (
                message,
                self.error_rx.try_iter().next(),
                self.error_context_rx.try_iter().next(),
            )
        }

        pub(crate) fn consume_message(&self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }
}
