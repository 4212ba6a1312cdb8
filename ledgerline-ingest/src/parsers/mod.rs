pub mod chase_debit;
