mod clip_random;
mod picking;
