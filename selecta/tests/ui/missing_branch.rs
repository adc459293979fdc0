use selecta::{Handler, HandlerFactory, Kind};

#[derive(Kind, Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Channel {
    Sms,
    #[default]
    Email,
}

struct Reply;

impl Handler<String> for Reply {
    type Output = String;

    fn handle(&self, to: &String) -> String {
        format!("sent to {to}")
    }
}

impl HandlerFactory for Channel {
    type Handler = Reply;

    fn create(self) -> Reply {
        match self {
            Channel::Email => Reply,
        }
    }
}

fn main() {}
