mod skinned_receiver;
mod static_receiver;
