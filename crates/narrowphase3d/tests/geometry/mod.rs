mod epa3;
mod properties;
mod sat_cross_check;
mod support_shapes;
