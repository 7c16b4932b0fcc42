pub mod list;
pub use list::list as other_list;
pub mod payload;
pub use payload::payload as other_payload;
#[cfg(test)]
mod tests {
    use crate::other_list::ListArena;

    #[test]
    fn it_works() {
        let mut arena: ListArena<&str> = ListArena::new();
        let head = arena.create(Some("hello")).unwrap();
        assert_eq!(arena.size(Some(head)), 1);
    }
}
