mod assignment;
mod classroom;
