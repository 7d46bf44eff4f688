pub mod earnings;
pub mod headcount;
