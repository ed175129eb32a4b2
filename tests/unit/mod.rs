mod planner_scenarios;
