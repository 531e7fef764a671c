pub mod planner_form;
