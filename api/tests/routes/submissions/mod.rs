mod batch_test;
mod policy_test;
mod timing_test;
