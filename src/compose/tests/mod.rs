mod filters;
mod ordering;
