pub mod ns16550;
