fn main() {
    #[cfg(feature = "csr")]
    todo_dashboard::mount();
}
