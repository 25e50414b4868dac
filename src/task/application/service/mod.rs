pub mod task_tracker;
