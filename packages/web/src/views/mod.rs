mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod todo_layout;
pub use todo_layout::TodoLayout;

mod todos;
pub use todos::TodoList;

mod todo_detail;
pub use todo_detail::TodoDetail;

mod todo_dialog;
pub use todo_dialog::{TodoEdit, TodoNew};

mod todo_delete_dialog;
pub use todo_delete_dialog::TodoDelete;
