mod health_test;
mod submissions;
