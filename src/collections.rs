mod seq;

pub use self::seq::Seq;
