pub mod task;

pub use task::{NewTaskRequest, Task, TaskList, TaskPriority, TaskStatus, UpdateTaskRequest};
