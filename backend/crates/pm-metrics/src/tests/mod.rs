mod velocity_aggregator;
