mod export;
mod fragment;
