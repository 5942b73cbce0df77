pub mod columns;
pub mod filter;
pub mod magnitude;
pub mod pins;
pub mod rows;
pub mod sort;
pub mod viewport;
pub mod visibility;
pub mod width;
pub mod window;
