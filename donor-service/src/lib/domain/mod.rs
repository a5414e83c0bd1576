pub mod donor;
