pub mod bank_order_writer;
