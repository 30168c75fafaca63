pub mod object_id;
